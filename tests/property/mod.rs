mod class_numbers;
mod determinism;
