// templates/pages/add_property.rs

use crate::db::seed::AMENITIES;
use crate::domain::form::{FieldErrors, ListingForm};
use crate::domain::property::{ListingStatus, PropertyType};
use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

pub struct AddPropertyVm<'a> {
    pub form: &'a ListingForm,
    pub errors: &'a FieldErrors,
    /// Preview URLs of the images selected so far, in order.
    pub previews: &'a [String],
}

fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error" { (msg) }
        }
    }
}

fn text_input(
    vm: &AddPropertyVm,
    name: &str,
    label: &str,
    value: &str,
    kind: &str,
    error_key: &str,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type=(kind) id=(name) name=(name) value=(value)
                step=[(kind == "number").then_some("any")]
                aria-invalid=[vm.errors.get(error_key).map(|_| "true")];
            (field_error(vm.errors, error_key))
        }
    }
}

pub fn add_property_page(ctx: &PageCtx, vm: &AddPropertyVm) -> Markup {
    let f = vm.form;
    let checked: Vec<String> = f.amenities();

    desktop_layout(
        "Add New Property",
        ctx,
        html! {
            main class="container narrow" {
                p { a href="/properties" { "← Back" } }
                h1 { "Add New Property" }

                form method="post" action="/properties/new" enctype="multipart/form-data" class="listing-form" {
                    section {
                        h2 { "Basic Information" }
                        (text_input(vm, "title", "Property Title", &f.title, "text", "title"))
                        (text_input(vm, "price", "Price", &f.price, "number", "price"))
                        div class="field" {
                            label for="description" { "Description" }
                            textarea id="description" name="description" rows="5" { (f.description) }
                            (field_error(vm.errors, "description"))
                        }
                        div class="field" {
                            label for="type" { "Property Type" }
                            select id="type" name="type" {
                                @for t in PropertyType::ALL {
                                    option value=(t.as_str()) selected[t == f.property_type] { (t.label()) }
                                }
                            }
                        }
                        div class="field" {
                            label for="status" { "Listing Status" }
                            select id="status" name="status" {
                                @for s in [ListingStatus::Sale, ListingStatus::Rent] {
                                    option value=(s.as_str()) selected[s == f.status] { (s.label()) }
                                }
                            }
                        }
                    }

                    section {
                        h2 { "Location" }
                        (text_input(vm, "street", "Street Address", &f.street, "text", "street"))
                        (text_input(vm, "city", "City", &f.city, "text", "city"))
                        (text_input(vm, "state", "State", &f.state, "text", "state"))
                        (text_input(vm, "zip", "ZIP Code", &f.zip, "text", "zip"))
                        div class="field-pair" {
                            (text_input(vm, "lat", "Latitude", &f.lat, "number", "location"))
                            (text_input(vm, "lng", "Longitude", &f.lng, "number", "none"))
                        }
                    }

                    section {
                        h2 { "Property Details" }
                        (text_input(vm, "beds", "Bedrooms", &f.beds, "number", "beds"))
                        (text_input(vm, "baths", "Bathrooms", &f.baths, "number", "baths"))
                        (text_input(vm, "sqft", "Square Feet", &f.sqft, "number", "sqft"))
                        (text_input(vm, "year", "Year Built", &f.year, "number", "year"))
                    }

                    section {
                        h2 { "Amenities" }
                        div class="amenity-grid" {
                            @for a in AMENITIES {
                                label class="check" {
                                    input type="checkbox" name="amenity" value=(a) checked[checked.iter().any(|c| c == a)];
                                    (a)
                                }
                            }
                            @for extra in checked.iter().filter(|c| !AMENITIES.contains(&c.as_str())) {
                                label class="check" {
                                    input type="checkbox" name="amenity" value=(extra) checked;
                                    (extra)
                                }
                            }
                        }
                        div class="field" {
                            label for="extra_amenities" { "Other amenities (comma separated)" }
                            input type="text" id="extra_amenities" name="extra_amenities" placeholder="e.g. Sauna, Rooftop Terrace";
                        }
                    }

                    section {
                        h2 { "Images" }
                        @if !vm.previews.is_empty() {
                            div class="preview-grid" {
                                @for (i, url) in vm.previews.iter().enumerate() {
                                    figure class="preview" {
                                        img src=(url) alt={ "Selected image " (i + 1) };
                                        button type="submit" name="remove_image" value=(i) formnovalidate class="btn btn-outline" aria-label={ "Remove image " (i + 1) } { "✕" }
                                    }
                                }
                            }
                        }
                        div class="field" {
                            label for="images" { "Upload Images" }
                            input type="file" id="images" name="images" accept="image/*" multiple;
                            button type="submit" name="intent" value="add_images" formnovalidate class="btn btn-outline" { "Add Images" }
                            (field_error(vm.errors, "images"))
                        }
                    }

                    button type="submit" name="intent" value="submit" class="btn btn-primary" { "Add Property" }
                }
            }
        },
    )
}
