pub mod comparator;
pub mod datapoints;
pub mod derive;
pub mod lookup;
