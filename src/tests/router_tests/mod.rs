mod auth_flow_tests;
mod form_tests;
mod page_tests;
