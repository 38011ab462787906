pub mod cmdline;
