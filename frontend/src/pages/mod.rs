pub mod fortune_wheel;
