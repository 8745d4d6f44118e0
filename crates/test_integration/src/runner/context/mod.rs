pub mod context_utils;
