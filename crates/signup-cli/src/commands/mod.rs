pub mod countries;
pub mod validate;

use signup_countries::{CountryDirectory, RestCountries, StaticDirectory};
use signup_form::Config;

/// The directory the configuration asks for; an empty one when disabled
pub fn directory(config: &Config, offline: bool) -> Box<dyn CountryDirectory> {
    if offline || !config.countries.enabled {
        Box::new(StaticDirectory::empty())
    } else {
        Box::new(RestCountries::new(config.countries.endpoint.clone()))
    }
}
