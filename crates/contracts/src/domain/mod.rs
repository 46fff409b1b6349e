pub mod a001_company;
pub mod a002_contact;
pub mod a003_contractor;
pub mod a004_circuit;
pub mod a005_link;
pub mod a006_service_order;
pub mod a007_viability;
pub mod a008_p2p;
pub mod a009_other_service;
pub mod a010_connection_type;
pub mod a011_link_type;
pub mod common;
