pub mod elbv2_catalog;
