pub mod fizzbuzz_script;
pub mod rot13_script;

pub use fizzbuzz_script::FizzBuzzScript;
pub use rot13_script::Rot13Script;
