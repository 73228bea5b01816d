//! Contract test runner for type_checks

mod test_properties;
