mod auth;
pub use auth::{Login, Root};

mod shell;
pub use shell::Shell;

mod pages;
pub use pages::{
    AiChat, ClientUpload, Clients, Dashboard, Notifications, PhoneNumbers, Products, Upload,
};
