// Business logic services

mod event;

pub use event::EventService;
