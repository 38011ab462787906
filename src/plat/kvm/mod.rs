pub mod ioctl;
