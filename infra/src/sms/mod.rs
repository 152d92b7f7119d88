//! SMS dispatch adapters.
//!
//! `TemplateSmsSender` talks to the Cloopen-style template-SMS REST API.
//! `MockSmsSender` logs instead of dispatching and is used when no provider
//! credentials are configured.

pub mod dispatcher;
pub mod mock_sms;
pub mod template_sms;

pub use dispatcher::SmsDispatcher;
pub use mock_sms::MockSmsSender;
pub use template_sms::TemplateSmsSender;
