pub mod viewport_mapper;
