//! The reusable complex datatypes.
//!
//! Every type here is an Element: `id`, `extension`, its declared fields in
//! catalog order, and an `unknown` side-bag holding fields preserved under
//! the lenient unknown-field policy.

mod address;
mod annotation;
mod attachment;
mod availability;
mod coding;
mod contact;
mod data_requirement;
mod dosage;
mod expression;
mod human_name;
mod identifier;
mod meta;
mod money;
mod narrative;
mod period;
mod product;
mod quantity;
mod reference;
mod related_artifact;
mod sampled_data;
mod signature;
mod timing;
mod usage_context;
mod virtual_service;

pub use address::Address;
pub use annotation::{Annotation, AnnotationAuthor};
pub use attachment::Attachment;
pub use availability::{Availability, AvailabilityAvailableTime, AvailabilityNotAvailableTime};
pub use coding::{CodeableConcept, CodeableReference, Coding};
pub use contact::{ContactDetail, ContactPoint, ExtendedContactDetail};
pub use data_requirement::{
    DataRequirement, DataRequirementCodeFilter, DataRequirementDateFilter, DataRequirementSort,
    DataRequirementSubject, DataRequirementValueFilter, DateFilterValue,
};
pub use dosage::{Dosage, DosageDose, DosageDoseAndRate, DosageRate};
pub use expression::Expression;
pub use human_name::HumanName;
pub use identifier::Identifier;
pub use meta::Meta;
pub use money::{MonetaryComponent, Money};
pub use narrative::Narrative;
pub use period::Period;
pub use product::{MarketingStatus, ProductShelfLife, ShelfLifePeriod};
pub use quantity::{Age, Count, Distance, Duration, Quantity, Range, Ratio, SimpleQuantity};
pub use reference::{parse_reference, Reference, ReferenceParts};
pub use related_artifact::RelatedArtifact;
pub use sampled_data::SampledData;
pub use signature::Signature;
pub use timing::{Timing, TimingRepeat, TimingRepeatBounds};
pub use usage_context::{UsageContext, UsageContextValue};
pub use virtual_service::{VirtualServiceAddress, VirtualServiceDetail};
