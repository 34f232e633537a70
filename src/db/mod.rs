/*!
Databases of the encoder.

At present, the only database is the [atom database](atom), which issues fresh atoms.
The record of clauses forwarded by an encoder is held by the [encoder](crate::encoder::ClauseEncoder) itself.
*/

pub mod atom;
