mod class_set;
mod types;
