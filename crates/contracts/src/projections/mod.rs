pub mod p900_billing;
