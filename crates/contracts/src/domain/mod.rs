pub mod a001_hotel;
