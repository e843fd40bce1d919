pub mod result_output;
