//! Feature classes and the collection registry.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use features_protocol::{
    CollectionDocument, CollectionExtent, CollectionList, FeatureError, FeatureResult, Link,
    LinkRelation, MediaType, SpatialExtent, TemporalExtent,
};
use sqlx::PgPool;
use tracing::info;

use crate::context::RequestContext;
use crate::provider::FeatureDataProvider;

/// Builds a collection's provider from the shared pool.
pub type ProviderFactory = Box<dyn Fn(PgPool) -> Arc<dyn FeatureDataProvider> + Send + Sync>;

/// A registered feature collection: metadata plus a lazily built provider.
pub struct FeatureClass {
    collection_id: String,
    title: String,
    description: String,
    spatial_extent: Option<Vec<SpatialExtent>>,
    temporal_extent: Option<Vec<TemporalExtent>>,
    factory: ProviderFactory,

    // Write-once, then shared for the lifetime of the registry.
    instance: OnceLock<Arc<dyn FeatureDataProvider>>,
    links: OnceLock<Vec<Link>>,
    extent: OnceLock<Option<CollectionExtent>>,
}

impl FeatureClass {
    /// Create a feature class whose provider is built by `factory`.
    pub fn new<F, P>(
        collection_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> Self
    where
        F: Fn(PgPool) -> P + Send + Sync + 'static,
        P: FeatureDataProvider + 'static,
    {
        Self {
            collection_id: collection_id.into(),
            title: title.into(),
            description: description.into(),
            spatial_extent: None,
            temporal_extent: None,
            factory: Box::new(move |pool| Arc::new(factory(pool)) as Arc<dyn FeatureDataProvider>),
            instance: OnceLock::new(),
            links: OnceLock::new(),
            extent: OnceLock::new(),
        }
    }

    /// Add a spatial extent `[min_x, min_y, max_x, max_y]`.
    pub fn with_spatial_extent(mut self, bbox: SpatialExtent) -> Self {
        self.spatial_extent.get_or_insert_with(Vec::new).push(bbox);
        self
    }

    /// Add a temporal extent `[start, end]`.
    pub fn with_temporal_extent(mut self, interval: TemporalExtent) -> Self {
        self.temporal_extent
            .get_or_insert_with(Vec::new)
            .push(interval);
        self
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The collection's provider, built on first use and reused afterwards.
    pub fn instance(&self, pool: &PgPool) -> Arc<dyn FeatureDataProvider> {
        self.instance
            .get_or_init(|| {
                info!(collection = %self.collection_id, "Creating feature data provider");
                (self.factory)(pool.clone())
            })
            .clone()
    }

    /// Spatial and temporal extent, or `None` if neither is configured.
    pub fn extent(&self) -> Option<&CollectionExtent> {
        self.extent
            .get_or_init(|| {
                CollectionExtent::from_parts(
                    self.spatial_extent.clone(),
                    self.temporal_extent.clone(),
                )
            })
            .as_ref()
    }

    /// The `self` and `items` links for this collection.
    pub fn links(&self, ctx: &RequestContext) -> &[Link] {
        self.links.get_or_init(|| {
            vec![
                Link::new(ctx.collection_url(&self.collection_id), LinkRelation::SelfLink)
                    .with_title(&self.title)
                    .with_type(MediaType::ApplicationJson),
                Link::new(ctx.items_url(&self.collection_id), LinkRelation::Items)
                    .with_title(format!("{} Items", self.title))
                    .with_type(MediaType::ApplicationJson),
            ]
        })
    }

    /// OGC Collection document for this class.
    pub fn as_document(&self, ctx: &RequestContext) -> CollectionDocument {
        CollectionDocument::new(&self.collection_id)
            .with_title(&self.title)
            .with_description(&self.description)
            .with_extent(self.extent().cloned())
            .with_links(self.links(ctx).to_vec())
    }
}

impl std::fmt::Debug for FeatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureClass")
            .field("collection_id", &self.collection_id)
            .field("title", &self.title)
            .field("instantiated", &self.instance.get().is_some())
            .finish()
    }
}

/// Collection id to feature class mapping.
///
/// Populated at startup, then shared read-only. Iteration follows
/// registration order.
pub struct FeatureClassRegistry {
    pool: PgPool,
    classes: Vec<FeatureClass>,
    index: HashMap<String, usize>,
}

impl FeatureClassRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            classes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Pool handed to providers.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Register a class, replacing any class with the same id in place.
    pub fn register(&mut self, feature_class: FeatureClass) {
        let id = feature_class.collection_id().to_string();
        match self.index.get(&id) {
            Some(&position) => {
                info!(collection = %id, "Replacing registered feature collection");
                self.classes[position] = feature_class;
            }
            None => {
                info!(collection = %id, "Registered feature collection");
                self.index.insert(id, self.classes.len());
                self.classes.push(feature_class);
            }
        }
    }

    pub fn find(&self, collection_id: &str) -> FeatureResult<&FeatureClass> {
        self.index
            .get(collection_id)
            .map(|&position| &self.classes[position])
            .ok_or_else(|| FeatureError::CollectionNotFound(collection_id.to_string()))
    }

    /// Provider for a registered collection.
    pub fn instance(&self, collection_id: &str) -> FeatureResult<Arc<dyn FeatureDataProvider>> {
        Ok(self.find(collection_id)?.instance(&self.pool))
    }

    /// One `collection` link per registered collection.
    pub fn links_for(&self, ctx: &RequestContext) -> Vec<Link> {
        self.classes
            .iter()
            .map(|class| {
                Link::new(ctx.collection_url(class.collection_id()), LinkRelation::Collection)
                    .with_title(class.title())
            })
            .collect()
    }

    /// Response body for the collections endpoint.
    pub fn as_document(&self, ctx: &RequestContext) -> CollectionList {
        CollectionList {
            links: self.links_for(ctx),
            collections: self.iter().map(|class| class.as_document(ctx)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureClass> {
        self.classes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|class| class.collection_id())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
