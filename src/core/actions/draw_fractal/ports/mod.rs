pub mod colour_map;
pub mod escape_time_algorithm;
