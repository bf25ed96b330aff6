pub mod add_property;
pub mod home;
pub mod login;
pub mod map_view;
pub mod properties;
pub mod property_view;

pub use add_property::{add_property_page, AddPropertyVm};
pub use home::home_page;
pub use login::login_page;
pub use map_view::{map_page, MapVm};
pub use properties::{properties_page, PropertiesVm, ViewMode};
pub use property_view::{property_not_found_page, property_page};
