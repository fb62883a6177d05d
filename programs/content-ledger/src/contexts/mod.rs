pub mod fee_policy;
pub mod pricing;
pub mod purchase;
pub mod subscription;
pub mod check_access;

pub use fee_policy::*;
pub use pricing::*;
pub use purchase::*;
pub use subscription::*;
pub use check_access::*;
