mod session_process_tests;
