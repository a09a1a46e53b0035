use super::Address;
use crate::model::service::ServiceError;
use geo::Coord;

/// resolves the address at a coordinate (x=longitude, y=latitude).
pub trait ReverseGeocoder {
    fn reverse(&self, coord: &Coord<f64>) -> Result<Address, ServiceError>;
}
