mod anki_tests;
