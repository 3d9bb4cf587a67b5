pub(crate) mod buffer_pool;
pub(crate) mod pipeline;
