mod helpers;

mod qr;
mod settings;
mod vcard;
