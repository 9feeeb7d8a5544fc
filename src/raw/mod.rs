mod id;
mod live_ids;
mod weights;

pub(crate) use id::Id;
pub(crate) use live_ids::LiveIds;
pub(crate) use weights::Weights;
