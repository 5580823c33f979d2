#![cfg(feature = "serde")]

use serde::ser::*;

use crate::colorspace::ColorSpace;
use crate::sample_depth::SampleDepth;

impl Serialize for ColorSpace {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply its debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for SampleDepth {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}
