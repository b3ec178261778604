pub mod a001_vendor_product;
