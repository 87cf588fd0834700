pub mod tab_config;
