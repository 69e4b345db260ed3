pub mod a001_contact;
