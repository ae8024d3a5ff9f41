mod rebinding_tests;
mod taylor_tests;
