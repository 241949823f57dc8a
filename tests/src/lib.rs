//! End-to-end conversions run against on-disk registries.

mod conversion;
