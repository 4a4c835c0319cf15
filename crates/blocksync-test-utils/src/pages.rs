//! Dashboard page fixtures.
//!
//! Trimmed-down stand-ins for the admin and agent dashboard pages. Both hold
//! a `{/* Create Vehicle Modal */}` block at six spaces of indentation.
//! [`NESTED_MODAL_BLOCK`] covers a block whose body closes an inner modal.

/// Relative path of the admin page in the built-in job.
pub const ADMIN_PAGE_PATH: &str = "frontend/src/pages/admin/AdminDashboardPage.jsx";

/// Relative path of the agent page in the built-in job.
pub const AGENT_PAGE_PATH: &str = "frontend/src/pages/agent/AgentDashboardPage.jsx";

pub const ADMIN_PAGE: &str = r#"import Modal from '../../components/Modal';

export default function AdminDashboardPage() {
  return (
    <div className="admin">
      {/* Create Vehicle Modal */}
      <Modal isOpen={showCreate} onClose={closeCreate}>
        <form onSubmit={handleCreateVehicle} className="emerald-teal">
          <h3>Grunddaten</h3>
          <input name="brand" />
          <h3>Technische Daten</h3>
          <input name="seats" />
          <h3>Kapazität &amp; Preise</h3>
          <input name="pricePerDay" />
          <h3>Beschreibung</h3>
          <textarea name="description" />
          <h3>Fahrzeugbild</h3>
          <input type="file" onChange={handleImageChange} />
          <div className="preview">
            <img src={preview} alt="" />
          </div>
        </form>
      </Modal>
    </div>
  );
}
"#;

/// The admin block exactly as it appears in [`ADMIN_PAGE`].
pub const ADMIN_BLOCK: &str = r#"      {/* Create Vehicle Modal */}
      <Modal isOpen={showCreate} onClose={closeCreate}>
        <form onSubmit={handleCreateVehicle} className="emerald-teal">
          <h3>Grunddaten</h3>
          <input name="brand" />
          <h3>Technische Daten</h3>
          <input name="seats" />
          <h3>Kapazität &amp; Preise</h3>
          <input name="pricePerDay" />
          <h3>Beschreibung</h3>
          <textarea name="description" />
          <h3>Fahrzeugbild</h3>
          <input type="file" onChange={handleImageChange} />
          <div className="preview">
            <img src={preview} alt="" />
          </div>
        </form>
      </Modal>"#;

pub const AGENT_PAGE: &str = r#"import Modal from '../../components/Modal';

export default function AgentDashboardPage() {
  return (
    <div className="agent">
      <h1>Meine Fahrzeuge</h1>

      {/* Create Vehicle Modal */}
      <Modal isOpen={showCreate} onClose={closeCreate}>
        <form onSubmit={handleCreateVehicle}>
          <input name="brand" />
        </form>
      </Modal>
    </div>
  );
}
"#;

/// [`AGENT_PAGE`] after the built-in job has run once.
pub const AGENT_PAGE_SYNCED: &str = r#"import Modal from '../../components/Modal';

export default function AgentDashboardPage() {
  return (
    <div className="agent">
      <h1>Meine Fahrzeuge</h1>

      {/* Create Vehicle Modal - Same as Admin */}
      <Modal isOpen={showCreate} onClose={closeCreate}>
        <form onSubmit={handleCreateVehicle} className="emerald-teal">
          <h3>Grunddaten</h3>
          <input name="brand" />
          <h3>Technische Daten</h3>
          <input name="seats" />
          <h3>Kapazität &amp; Preise</h3>
          <input name="pricePerDay" />
          <h3>Beschreibung</h3>
          <textarea name="description" />
          <h3>Fahrzeugbild</h3>
          <input type="file" onChange={handleImageChange} />
          <div className="preview">
            <img src={preview} alt="" />
          </div>
        </form>
      </Modal>
    </div>
  );
}
"#;

/// An agent page without any vehicle modal block.
pub const AGENT_PAGE_WITHOUT_BLOCK: &str = r#"export default function AgentDashboardPage() {
  return <div className="agent" />;
}
"#;

/// An admin page whose block never closes.
pub const ADMIN_PAGE_UNCLOSED: &str = r#"export default function AdminDashboardPage() {
  return (
    <div>
      {/* Create Vehicle Modal */}
      <form />
    </div>
  );
}
"#;

/// A vehicle modal wrapping a nested preview modal one level deeper.
pub const NESTED_MODAL_BLOCK: &str = r#"      {/* Create Vehicle Modal */}
      <Modal isOpen={showCreate}>
        <Modal isOpen={showPreview}>
          <img src={preview} alt="" />
        </Modal>
        <button type="submit" />
      </Modal>"#;
