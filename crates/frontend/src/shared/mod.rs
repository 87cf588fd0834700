pub mod class_set;
pub mod dom;
pub mod lookup;
pub mod type_util;
