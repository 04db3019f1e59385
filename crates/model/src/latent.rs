//! Hybrid latent-factor model trained on implicit feedback.
//!
//! A user is its identity embedding. An item is the normalised sum of its
//! identity embedding and the embeddings of its attribute features, so
//! items sharing a type, color or material share part of their vector.
//! Training is plain SGD on the logistic loss with uniformly sampled
//! unobserved items as negatives.

use ndarray::{Array1, Array2, ArrayView1};
use pipeline::{InteractionMatrix, ItemFeatureMatrix};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::config::TrainingConfig;
use crate::error::TrainError;
use crate::initializer;

/// Trained model parameters
#[derive(Debug, Clone)]
pub struct LatentFactorModel {
    user_embeddings: Array2<f32>,
    user_biases: Array1<f32>,
    item_embeddings: Array2<f32>,
    item_biases: Array1<f32>,
    feature_embeddings: Array2<f32>,
    feature_biases: Array1<f32>,
    /// Feature columns per item, cached from the feature matrix
    item_features: Vec<Vec<usize>>,
    components: usize,
}

/// Train a model on the given matrices.
///
/// Every stored interaction cell is one positive regardless of its count.
#[instrument(skip_all, fields(users = interactions.n_users(), items = interactions.n_items()))]
pub fn train(
    interactions: &InteractionMatrix,
    item_features: &ItemFeatureMatrix,
    config: &TrainingConfig,
) -> Result<LatentFactorModel, TrainError> {
    config.validate()?;

    let n_users = interactions.n_users();
    let n_items = interactions.n_items();
    if n_users == 0 || n_items == 0 {
        return Err(TrainError::EmptyMatrix {
            users: n_users,
            items: n_items,
        });
    }
    if item_features.n_items() != n_items {
        return Err(TrainError::ShapeMismatch {
            interaction_items: n_items,
            feature_items: item_features.n_items(),
        });
    }

    let mut positives: Vec<(usize, usize)> = interactions
        .as_sparse()
        .iter()
        .map(|(user, item, _)| (user, item))
        .collect();
    if positives.is_empty() {
        return Err(TrainError::NoInteractions);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut model =
        LatentFactorModel::initialize(&mut rng, n_users, item_features, config.components);

    for epoch in 1..=config.epochs {
        positives.shuffle(&mut rng);

        let mut loss = 0.0f64;
        let mut updates = 0usize;
        for &(user, item) in &positives {
            loss += model.sgd_step(user, item, 1.0, config) as f64;
            updates += 1;

            for _ in 0..config.negatives_per_positive {
                if let Some(negative) = sample_negative(&mut rng, interactions, user) {
                    loss += model.sgd_step(user, negative, 0.0, config) as f64;
                    updates += 1;
                }
            }
        }

        if !model.is_finite() {
            return Err(TrainError::Diverged { epoch });
        }
        debug!(epoch, loss = loss / updates as f64, "Epoch complete");
    }

    info!(
        "Trained model: {} users, {} items, {} components, {} epochs",
        n_users, n_items, config.components, config.epochs
    );
    Ok(model)
}

/// Draw an item the user has not interacted with, `None` if there is none
fn sample_negative(
    rng: &mut StdRng,
    interactions: &InteractionMatrix,
    user: usize,
) -> Option<usize> {
    let seen: Vec<usize> = interactions.items_of(user).collect();
    let unseen = interactions.n_items() - seen.len();
    if unseen == 0 {
        return None;
    }

    // Pick the k-th unseen item by walking past the sorted seen ones
    let mut candidate = rng.random_range(0..unseen);
    for &item in &seen {
        if item <= candidate {
            candidate += 1;
        } else {
            break;
        }
    }
    Some(candidate)
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl LatentFactorModel {
    fn initialize(
        rng: &mut StdRng,
        n_users: usize,
        item_features: &ItemFeatureMatrix,
        components: usize,
    ) -> Self {
        let n_items = item_features.n_items();
        let n_features = item_features.n_features();

        Self {
            user_embeddings: initializer::embeddings(rng, n_users, components),
            user_biases: initializer::zeros(n_users),
            item_embeddings: initializer::embeddings(rng, n_items, components),
            item_biases: initializer::zeros(n_items),
            feature_embeddings: initializer::embeddings(rng, n_features, components),
            feature_biases: initializer::zeros(n_features),
            item_features: (0..n_items)
                .map(|item| item_features.features_of(item).collect())
                .collect(),
            components,
        }
    }

    pub fn n_users(&self) -> usize {
        self.user_embeddings.nrows()
    }

    pub fn n_items(&self) -> usize {
        self.item_embeddings.nrows()
    }

    pub fn components(&self) -> usize {
        self.components
    }

    /// Weight applied to each part of an item's representation
    fn item_weight(&self, item: usize) -> f32 {
        1.0 / (1.0 + self.item_features[item].len() as f32)
    }

    /// Combined item vector and bias
    fn item_representation(&self, item: usize) -> (Array1<f32>, f32) {
        let weight = self.item_weight(item);
        let mut vector = self.item_embeddings.row(item).to_owned();
        let mut bias = self.item_biases[item];
        for &feature in &self.item_features[item] {
            vector += &self.feature_embeddings.row(feature);
            bias += self.feature_biases[feature];
        }
        (vector * weight, bias * weight)
    }

    fn predict(&self, user: usize, item_vector: ArrayView1<f32>, item_bias: f32) -> f32 {
        self.user_embeddings.row(user).dot(&item_vector) + self.user_biases[user] + item_bias
    }

    /// One gradient step on a (user, item, label) triple, returns the loss
    fn sgd_step(&mut self, user: usize, item: usize, label: f32, config: &TrainingConfig) -> f32 {
        let lr = config.learning_rate;
        let reg = config.regularization;
        let weight = self.item_weight(item);

        let (item_vector, item_bias) = self.item_representation(item);
        let prediction = sigmoid(self.predict(user, item_vector.view(), item_bias));
        let gradient = prediction - label;

        let user_vector = self.user_embeddings.row(user).to_owned();

        // User side
        {
            let mut row = self.user_embeddings.row_mut(user);
            row *= 1.0 - lr * reg;
            row.scaled_add(-lr * gradient, &item_vector);
        }
        self.user_biases[user] -= lr * gradient;

        // Item side, identity and every feature share the same gradient
        let item_step = -lr * gradient * weight;
        {
            let mut row = self.item_embeddings.row_mut(item);
            row *= 1.0 - lr * reg;
            row.scaled_add(item_step, &user_vector);
        }
        self.item_biases[item] += item_step;

        for &feature in &self.item_features[item] {
            let mut row = self.feature_embeddings.row_mut(feature);
            row *= 1.0 - lr * reg;
            row.scaled_add(item_step, &user_vector);
            self.feature_biases[feature] += item_step;
        }

        let p = prediction.clamp(1e-7, 1.0 - 1e-7);
        -(label * p.ln() + (1.0 - label) * (1.0 - p).ln())
    }

    fn is_finite(&self) -> bool {
        self.user_embeddings.iter().all(|x| x.is_finite())
            && self.user_biases.iter().all(|x| x.is_finite())
            && self.item_embeddings.iter().all(|x| x.is_finite())
            && self.item_biases.iter().all(|x| x.is_finite())
            && self.feature_embeddings.iter().all(|x| x.is_finite())
            && self.feature_biases.iter().all(|x| x.is_finite())
    }

    fn check_user(&self, user: usize) -> Result<(), TrainError> {
        if user >= self.n_users() {
            return Err(TrainError::IndexOutOfRange {
                kind: "user",
                index: user,
                len: self.n_users(),
            });
        }
        Ok(())
    }

    /// Relevance scores of `items` for `user`, in input order.
    ///
    /// Scores are only comparable within one user.
    pub fn score(&self, user: usize, items: &[usize]) -> Result<Vec<f32>, TrainError> {
        self.check_user(user)?;
        items
            .iter()
            .map(|&item| {
                if item >= self.n_items() {
                    return Err(TrainError::IndexOutOfRange {
                        kind: "item",
                        index: item,
                        len: self.n_items(),
                    });
                }
                let (vector, bias) = self.item_representation(item);
                Ok(self.predict(user, vector.view(), bias))
            })
            .collect()
    }

    /// Scores of every known item for `user`, indexed by item
    pub fn score_all(&self, user: usize) -> Result<Vec<f32>, TrainError> {
        let items: Vec<usize> = (0..self.n_items()).collect();
        self.score(user, &items)
    }
}
