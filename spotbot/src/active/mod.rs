pub use self::{
    presenter::{ComponentPress, InteractionPresenter, MessageHandle, Presenter},
    source::SightingSource,
};

pub mod pagination;

mod presenter;
mod source;
