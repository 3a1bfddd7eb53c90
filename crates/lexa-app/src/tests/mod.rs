mod restore_tests;
mod workflow_tests;
