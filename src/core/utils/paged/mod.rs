pub mod huge_long_array_queue;
pub mod huge_long_array_stack;
pub mod parallel_long_page_creator;

pub use huge_long_array_queue::HugeLongArrayQueue;
pub use huge_long_array_stack::HugeLongArrayStack;
pub use parallel_long_page_creator::ParallelLongPageCreator;
