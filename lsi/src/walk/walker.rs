//! Element-by-element traversal of a path, following symlinks on request.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::cancel::CancelToken;
use crate::config::{WalkConfig, MAX_LINK_DEPTH};
use crate::error::{Error, Result};
use crate::path::{clean, split};
use crate::platform::{self, NativePlatform, Platform};
use crate::walk::record::{Record, RecordBuilder};

/// What the walker should do after a record has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// If the element is a symlink, walk its target before moving on.
    Follow,
    /// Move on to the next element.
    Continue,
}

impl Step {
    /// [`Step::Follow`] when `follow` is set, [`Step::Continue`] otherwise.
    #[must_use]
    pub const fn follow_if(follow: bool) -> Self {
        if follow {
            Self::Follow
        } else {
            Self::Continue
        }
    }
}

/// Receives every record a walk produces, in order.
///
/// Returning an error stops the walk, and [`Walker::walk`] returns that
/// error unchanged. Closures of the right shape are visitors:
///
/// ```
/// use lsi::{CancelToken, Record, Step, Walker};
///
/// let mut names = Vec::new();
/// Walker::new()
///     .walk(".", &CancelToken::new(), &mut |record: Record| {
///         names.push(record.name().to_string());
///         Ok(Step::Continue)
///     })
///     .unwrap();
/// assert_eq!(names, ["."]);
/// ```
pub trait Visitor {
    /// Handle one record.
    ///
    /// # Errors
    ///
    /// Any error ends the walk.
    fn visit(&mut self, record: Record) -> Result<Step>;
}

impl<F> Visitor for F
where
    F: FnMut(Record) -> Result<Step>,
{
    fn visit(&mut self, record: Record) -> Result<Step> {
        self(record)
    }
}

/// A visitor that keeps every record and stops at the first failed one.
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<Record>,
    follow: bool,
}

impl Collector {
    /// Collect records, following symlinks when `follow` is set.
    #[must_use]
    pub fn new(follow: bool) -> Self {
        Self {
            records: Vec::new(),
            follow,
        }
    }

    /// The records gathered so far, including a trailing failed one.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Take the gathered records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Visitor for Collector {
    fn visit(&mut self, record: Record) -> Result<Step> {
        let failure = record.error().cloned();
        self.records.push(record);
        match failure {
            Some(err) => Err(err),
            None => Ok(Step::follow_if(self.follow)),
        }
    }
}

/// Walks every element of a path and reports it to a [`Visitor`].
///
/// # Examples
///
/// ```
/// use lsi::{CancelToken, Collector, Walker};
///
/// let mut collector = Collector::new(true);
/// Walker::new().walk("/", &CancelToken::new(), &mut collector)?;
/// assert_eq!(collector.records()[0].name(), "/");
/// # Ok::<(), lsi::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Walker<P = NativePlatform> {
    platform: P,
    config: WalkConfig,
}

impl Walker<NativePlatform> {
    /// A walker for the host platform with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(platform::native())
    }
}

impl Default for Walker<NativePlatform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Walker<P> {
    /// A walker reading metadata through `platform`.
    pub fn with_platform(platform: P) -> Self {
        Self {
            platform,
            config: WalkConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn walk_config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walk `path`, handing one record per element to `visitor`.
    ///
    /// When the visitor answers [`Step::Follow`] for a symlink, the link
    /// target is walked (relative to the link's directory) before the next
    /// element, with depth one greater.
    ///
    /// # Errors
    ///
    /// - [`Error::Canceled`] or [`Error::DeadlineExceeded`] once `cancel`
    ///   fires; the element being reached gets a failed record first, unless
    ///   the token had already fired before the walk began. The visitor's
    ///   answer to that record is ignored
    /// - [`Error::SymlinkDepthExceeded`] when following goes deeper than the
    ///   configured ceiling (never more than [`MAX_LINK_DEPTH`])
    /// - whatever error the visitor returns
    ///
    /// A failed metadata lookup is not an error of the walk: it is reported
    /// on the record and the walk goes on unless the visitor stops it.
    pub fn walk<V: Visitor>(
        &self,
        path: impl AsRef<Path>,
        cancel: &CancelToken,
        visitor: &mut V,
    ) -> Result<()> {
        let path = path.as_ref();
        debug!("walking {}", path.display());
        self.walk_at(path, Path::new(""), 0, cancel, visitor)
    }

    fn walk_at(
        &self,
        path: &Path,
        base: &Path,
        depth: usize,
        cancel: &CancelToken,
        visitor: &mut dyn Visitor,
    ) -> Result<()> {
        cancel.check()?;

        let ceiling = self.config.max_link_depth.min(MAX_LINK_DEPTH);
        if depth > ceiling {
            let err = Error::SymlinkDepthExceeded {
                path: base.join(path),
                max: ceiling,
            };
            debug!("{err}");
            let record = Record::builder(path, path.to_string_lossy())
                .depth(depth)
                .error(err.clone())
                .build();
            visitor.visit(record)?;
            return Err(err);
        }

        let elements = split(path);
        let volume = elements.volume();

        for (i, element) in elements.iter().enumerate() {
            let relative = elements.prefix(i + 1);
            let builder = Record::builder(&relative, element.to_string_lossy())
                .volume(volume.as_str())
                .depth(depth);

            if let Err(err) = cancel.check() {
                debug!("walk of {} interrupted: {err}", path.display());
                let _ = visitor.visit(builder.error(err.clone()).build());
                return Err(err);
            }

            // Metadata and parent device both come from the cleaned path.
            let concrete = clean(base.join(&relative));
            let record = self.inspect(&concrete, builder);
            let link = record.link().map(Path::to_path_buf);

            let step = visitor.visit(record)?;
            if let (Step::Follow, Some(target)) = (step, link) {
                let link_dir = base.join(elements.prefix(i));
                debug!(
                    "following {} -> {} at depth {}",
                    concrete.display(),
                    target.display(),
                    depth + 1
                );
                self.walk_at(&target, &link_dir, depth + 1, cancel, visitor)?;
            }
        }

        Ok(())
    }

    /// Fill in a record for the element at `concrete`.
    fn inspect(&self, concrete: &Path, builder: RecordBuilder) -> Record {
        match self.resolve(concrete, builder.clone()) {
            Ok(record) => record,
            Err(err) => {
                trace!("inspecting {} failed: {err}", concrete.display());
                builder.error(err).build()
            }
        }
    }

    fn resolve(&self, concrete: &Path, builder: RecordBuilder) -> Result<Record> {
        let metadata =
            fs::symlink_metadata(concrete).map_err(|e| Error::lookup(concrete, e))?;

        let link: Option<PathBuf> = if metadata.file_type().is_symlink() {
            Some(fs::read_link(concrete).map_err(|e| Error::read_link(concrete, e))?)
        } else {
            None
        };

        let ids = self.platform.identifiers(&metadata);
        let mode = self.platform.mode(&metadata);
        let parent_device = self.platform.parent_device(concrete);
        let owner = self.platform.ownership(&metadata)?;
        trace!("{}: dev={} ino={}", concrete.display(), ids.device, ids.inode);

        let mut builder = builder
            .mode(mode.symbolic())
            .devices(ids.device, parent_device)
            .inode(ids.inode)
            .size(ids.size)
            .owner(owner.uid, owner.user)
            .group(owner.gid, owner.group);
        if let Some(target) = link {
            builder = builder.link(target);
        }
        Ok(builder.build())
    }
}
