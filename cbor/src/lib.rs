/*!
The data item model shared by tessera's CBOR encoders and decoders.

A decoder walks its [`Input`](tessera_io::Input) and reports every data item
it recognises to a [`Receiver`]. The stock receiver, [`Receptacle`], keeps
only the latest item, which callers then read back through typed accessors or
through [`FromItem`] and [`Nullable`].
*/

use tracing::*;

mod data_item;
mod default;
mod error;
mod nullable;
mod receiver;
mod receptacle;
mod simple_value;
mod tag;

pub use tessera_io as io;
pub use tessera_io::ByteAccess;

pub use data_item::{DataItem, Item};
pub use default::NullDefault;
pub use error::Error;
pub use nullable::{FromItem, Nullable};
pub use receiver::{Cursor, Receiver};
pub use receptacle::Receptacle;
pub use simple_value::SimpleValue;
pub use tag::Tag;
