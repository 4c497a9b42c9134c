pub mod a100_employee_incentive;
pub mod a101_ph_location;
