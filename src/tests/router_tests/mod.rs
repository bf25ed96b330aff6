mod auth_flow_tests;
mod browse_tests;
mod listing_tests;
mod media_tests;
