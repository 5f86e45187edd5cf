//! Loose object database access
//!
//! Objects live at `.git/objects/<first-2>/<remaining-38>`, zlib
//! compressed, with the decompressed stream framed as
//! `<type> <size>\0<content>`. Access is strictly read-only.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepoError;
use bytes::Bytes;
use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: support packfiles so repositories with fully packed history can be listed
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Load and parse the commit stored under `object_id`
    ///
    /// Fails with [`RepoError::ObjectNotFound`] when the loose object is
    /// missing or its zlib stream cannot be decoded, and with
    /// [`RepoError::MalformedObject`] when the decompressed content is
    /// anything but a well-formed commit.
    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        if object_type != ObjectType::Commit {
            return Err(RepoError::MalformedObject {
                oid: object_id.clone(),
                reason: format!("expected a commit, found a {object_type}"),
            }
            .into());
        }

        Commit::deserialize(object_reader).map_err(|error| {
            RepoError::MalformedObject {
                oid: object_id.clone(),
                reason: format!("{error:#}"),
            }
            .into()
        })
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_content = self.read_object(object_id)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type =
            ObjectType::parse_object_type(&mut object_reader).map_err(|error| {
                RepoError::MalformedObject {
                    oid: object_id.clone(),
                    reason: format!("{error:#}"),
                }
            })?;

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.object_path(object_id);

        let object_content = std::fs::read(&object_path).map_err(|_| RepoError::ObjectNotFound {
            oid: object_id.clone(),
        })?;

        Self::decompress(object_content.into()).map_err(|_| {
            RepoError::ObjectNotFound {
                oid: object_id.clone(),
            }
            .into()
        })
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
