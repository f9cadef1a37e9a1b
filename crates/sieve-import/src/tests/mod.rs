mod kindle_tests;
