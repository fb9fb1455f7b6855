use approx::assert_relative_eq;
use kornia_3d_augment::{
    config::parse_transforms,
    pointcloud::PointCloud,
    transforms::{
        DegeneratePolicy, FlipMode, Normalize, PointCloudTransform, RandomFlip, Rescale, Rotate,
        Shear, Transform, Translate,
    },
    TransformError,
};

fn sample_cloud() -> PointCloud {
    PointCloud::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, -2.0, 3.0],
        [-4.5, 0.25, 2.0],
        [10.0, 7.0, -1.0],
        [0.3, 0.3, 0.3],
    ])
}

fn all_transforms() -> Result<Vec<PointCloudTransform>, TransformError> {
    Ok(vec![
        RandomFlip::horizontal(0.5, FlipMode::StochasticPerCall, Some(11))?.into(),
        RandomFlip::vertical(0.9, FlipMode::DeterministicThreshold, None)?.into(),
        Translate::new(&[1.0, -2.0, 0.5])?.into(),
        Shear::new(15.0)?.into(),
        Rescale::new(&[2.0, 1.0, 0.5])?.into(),
        Rotate::new(60.0)?.into(),
        Normalize::new(DegeneratePolicy::Error).into(),
    ])
}

#[test]
fn every_transform_preserves_shape() -> Result<(), TransformError> {
    let src = sample_cloud();
    for mut t in all_transforms()? {
        let out = t.apply(&src)?;
        assert_eq!(out.len(), src.len(), "{t} changed the number of points");
    }
    Ok(())
}

#[test]
fn every_transform_keeps_empty_clouds_empty() -> Result<(), TransformError> {
    let empty = PointCloud::default();
    for mut t in all_transforms()? {
        assert!(t.apply(&empty)?.is_empty());
    }
    Ok(())
}

#[test]
fn sequential_pipeline() -> Result<(), TransformError> {
    let mut transforms = all_transforms()?;
    let src = sample_cloud();

    let mut out = src.clone();
    for t in transforms.iter_mut() {
        out = t.apply(&out)?;
    }

    // the last step is a normalization
    assert_eq!(out.len(), src.len());
    for p in out.points() {
        for v in p {
            assert!((0.0..=1.0).contains(v));
        }
    }
    Ok(())
}

#[test]
fn linear_transforms_match_hand_computed_matrices() -> Result<(), TransformError> {
    let src = PointCloud::new(vec![[1.0, 1.0, 1.0]]);

    let out = Rescale::new(&[2.0, 1.0, 0.5])?.apply(&src)?;
    assert_eq!(out.points(), &[[2.0, 1.0, 0.5]]);

    let out = Translate::new(&[1.0, 2.0, 3.0])?.apply(&PointCloud::new(vec![[0.0, 0.0, 1.0]]))?;
    assert_eq!(out.points(), &[[1.0, 2.0, 3.0]]);

    // s = sinh(45 deg) on the all-ones point gives 1 + 2s on every axis
    let s = std::f64::consts::FRAC_PI_4.sinh();
    let out = Shear::new(45.0)?.apply(&src)?;
    for v in out.points()[0] {
        assert_relative_eq!(v, 1.0 + 2.0 * s, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn rotation_by_zero_is_identity() -> Result<(), TransformError> {
    let src = sample_cloud();
    let out = Rotate::new(0.0)?.apply(&src)?;
    for (p, q) in src.points().iter().zip(out.points().iter()) {
        for k in 0..3 {
            assert_relative_eq!(p[k], q[k], epsilon = 1e-12);
        }
    }
    Ok(())
}

#[test]
fn configured_pipeline_is_reproducible() -> Result<(), TransformError> {
    let json = r#"[
        { "type": "horizontal_flip", "p": 0.5, "seed": 1234 },
        { "type": "vertical_flip", "p": 0.5, "seed": 4321 },
        { "type": "rotate", "rot_deg": 20.0 }
    ]"#;

    let mut a = parse_transforms(json)?;
    let mut b = parse_transforms(json)?;
    let src = sample_cloud();

    for _ in 0..20 {
        let mut out_a = src.clone();
        let mut out_b = src.clone();
        for (ta, tb) in a.iter_mut().zip(b.iter_mut()) {
            out_a = ta.apply(&out_a)?;
            out_b = tb.apply(&out_b)?;
        }
        assert_eq!(out_a, out_b);
    }
    Ok(())
}
