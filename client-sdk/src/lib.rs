pub mod external_api;
