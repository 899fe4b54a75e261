mod api_tests;
mod catalog_tests;
mod driver_tests;
mod inventory_tests;
