// Assessment result retrieval: latest stored submission plus generated recommendations.

pub mod handlers;
pub mod repository;
