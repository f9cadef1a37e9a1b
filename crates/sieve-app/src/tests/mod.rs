mod io_tests;
