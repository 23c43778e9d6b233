//! Form field names.

pub mod contact {
    pub const NAME: &str = "name";
    pub const ORGANIZATION: &str = "org";
    pub const TITLE: &str = "title";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const USE_GRAVATAR: &str = "useGravatar";
    pub const WORK_ORGANIZATION: &str = "work";
    pub const URL: &str = "url";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const REGION: &str = "region";
    pub const POSTAL_CODE: &str = "postal";
    pub const COUNTRY: &str = "country";
    pub const NOTE: &str = "note";
}

pub mod event {
    pub const TITLE: &str = "title";
    pub const START_DATE: &str = "startDate";
    pub const HAS_START_TIME: &str = "hasStartTime";
    pub const START_TIME: &str = "startTime";
    pub const END_DATE: &str = "endDate";
    pub const HAS_END_TIME: &str = "hasEndTime";
    pub const END_TIME: &str = "endTime";
    pub const TIMEZONE: &str = "timezone";
    pub const LOCATION: &str = "location";
    pub const DESCRIPTION: &str = "description";
    pub const ORGANIZER: &str = "organizer";
    pub const ORGANIZER_EMAIL: &str = "organizerEmail";
}

pub mod qr {
    pub const SIZE: &str = "size";
    pub const ERROR_CORRECTION: &str = "ecl";
}
