mod path_tests;
mod retry_tests;
mod session_tests;
