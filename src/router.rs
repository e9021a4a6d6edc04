use representation::{FullyMeshedNet, Representation};

use crate::{
    encoder::{FULLY_MESHED_NET_TEMPLATE, FullyMeshedNetEncoder},
    template::Placeholders,
};

/// The outcome of matching a representation against the kinds the exporter supports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route<'a> {
    FullyMeshedNet(&'a FullyMeshedNet),
    Unsupported,
}

/// A representation's fields, ready for its template.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    pub template: &'static str,
    pub placeholders: Placeholders,
}

/// Matches `representation` against the supported kinds.
///
/// Every input has exactly one route, a missing representation is `Unsupported`.
pub fn route(representation: Option<&Representation>) -> Route<'_> {
    let Some(representation) = representation else {
        return Route::Unsupported;
    };

    match representation {
        Representation::FullyMeshedNet(net) => Route::FullyMeshedNet(net),
        Representation::Unknown => Route::Unsupported,
    }
}

impl Route<'_> {
    /// Runs the encoder matching this route.
    ///
    /// # Returns
    /// The template and its placeholders, or `None` if the route is `Unsupported`.
    pub fn encode(self) -> Option<Encoded> {
        match self {
            Route::FullyMeshedNet(net) => Some(Encoded {
                template: FULLY_MESHED_NET_TEMPLATE,
                placeholders: FullyMeshedNetEncoder::encode(net),
            }),
            Route::Unsupported => None,
        }
    }
}
