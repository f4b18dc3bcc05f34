// Settings form surface - descriptors only, rendering belongs to the host

pub mod options;

pub use options::{DescriptorBuilder, InputKind, OptionDescriptor, SliderRange, Visibility};
